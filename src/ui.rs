use crate::models::StatsResponse;

pub fn render_index(today: &str, stats: &StatsResponse) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{TOTAL}}", &stats.total.to_string())
        .replace("{{EASY}}", &stats.easy.to_string())
        .replace("{{MEDIUM}}", &stats.medium.to_string())
        .replace("{{HARD}}", &stats.hard.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Problem Tracker</title>
  <style>
    :root {
      --bg: #f4f6f9;
      --ink: #22303c;
      --muted: #6b7785;
      --card: #ffffff;
      --accent: #3498db;
      --easy: #27ae60;
      --medium: #f39c12;
      --hard: #e74c3c;
      --shadow: 0 12px 32px rgba(34, 48, 60, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(1040px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    section {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
      background: transparent;
      box-shadow: none;
      padding: 0;
    }

    .stat {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 16px 18px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    .stat.easy .value { color: var(--easy); }
    .stat.medium .value { color: var(--medium); }
    .stat.hard .value { color: var(--hard); }

    form.add {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 12px;
    }

    form.add label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    form.add .wide {
      grid-column: 1 / -1;
    }

    input, select, textarea {
      font: inherit;
      padding: 8px 10px;
      border: 1px solid #d5dbe1;
      border-radius: 8px;
      color: var(--ink);
    }

    textarea {
      min-height: 80px;
      resize: vertical;
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 8px;
      padding: 9px 16px;
      cursor: pointer;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 16px;
    }

    .filter-btn {
      background: #eef2f5;
      color: var(--muted);
    }

    .filter-btn.active {
      background: var(--accent);
      color: white;
    }

    .problems {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
      gap: 14px;
    }

    .problem-card {
      border: 1px solid #e3e8ed;
      border-left: 5px solid var(--accent);
      border-radius: 12px;
      padding: 14px 16px;
      display: grid;
      gap: 10px;
    }

    .problem-card.easy { border-left-color: var(--easy); }
    .problem-card.medium { border-left-color: var(--medium); }
    .problem-card.hard { border-left-color: var(--hard); }

    .problem-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 10px;
    }

    .problem-title {
      margin: 0;
      font-size: 1.05rem;
    }

    .badge {
      font-size: 0.75rem;
      font-weight: 600;
      border-radius: 999px;
      padding: 3px 10px;
      color: white;
    }

    .badge.easy { background: var(--easy); }
    .badge.medium { background: var(--medium); }
    .badge.hard { background: var(--hard); }

    .problem-meta {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tag {
      background: #eef2f5;
      border-radius: 6px;
      padding: 2px 8px;
      font-size: 0.8rem;
    }

    .problem-solution {
      margin: 0;
      font-size: 0.92rem;
    }

    .problem-actions {
      display: flex;
      gap: 8px;
    }

    .delete-form {
      margin: 0;
    }

    .problem-actions a,
    .problem-actions button {
      font-size: 0.85rem;
      padding: 6px 12px;
      border-radius: 8px;
      text-decoration: none;
    }

    .view-btn {
      background: #eaf4fb;
      color: var(--accent);
    }

    .delete-btn {
      background: #fdecea;
      color: var(--hard);
    }

    .no-problems {
      color: var(--muted);
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 2.5;
    }

    .chart-fill {
      fill: rgba(52, 152, 219, 0.1);
      stroke: none;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(34, 48, 60, 0.1);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.95rem;
      color: var(--muted);
    }

    .status[data-type="error"] { color: var(--hard); }
    .status[data-type="ok"] { color: var(--easy); }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Problem Tracker</h1>
      <p class="subtitle">Log the problems you solve and watch the count climb.</p>
    </header>

    <section class="stats">
      <div class="stat">
        <span class="label">Total</span>
        <span id="total-problems" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat easy">
        <span class="label">Easy</span>
        <span id="easy-problems" class="value">{{EASY}}</span>
      </div>
      <div class="stat medium">
        <span class="label">Medium</span>
        <span id="medium-problems" class="value">{{MEDIUM}}</span>
      </div>
      <div class="stat hard">
        <span class="label">Hard</span>
        <span id="hard-problems" class="value">{{HARD}}</span>
      </div>
    </section>

    <section>
      <h2>Add a problem</h2>
      <form id="problem-form" class="add" method="post" action="/problems">
        <label>Title
          <input name="title" id="problem-title" required />
        </label>
        <label>Link
          <input name="link" id="problem-link" type="url" />
        </label>
        <label>Date
          <input name="date" id="problem-date" type="date" value="{{TODAY}}" required />
        </label>
        <label>Difficulty
          <select name="difficulty" id="difficulty">
            <option value="easy">Easy</option>
            <option value="medium">Medium</option>
            <option value="hard">Hard</option>
          </select>
        </label>
        <label>Time complexity
          <input name="timeComplexity" id="time-complexity" placeholder="O(n)" />
        </label>
        <label>Space complexity
          <input name="spaceComplexity" id="space-complexity" placeholder="O(1)" />
        </label>
        <label class="wide">Tags (comma separated)
          <input name="tags" id="tags" placeholder="Array, Hash Table" />
        </label>
        <label class="wide">Solution approach
          <textarea name="solution" id="solution"></textarea>
        </label>
        <div class="wide">
          <button class="btn-primary" type="submit">Add problem</button>
        </div>
      </form>
      <div class="status" id="status"></div>
    </section>

    <section id="problems">
      <h2>Solved problems</h2>
      <div class="filters">
        <button class="filter-btn active" type="button" data-difficulty="all">All</button>
        <button class="filter-btn" type="button" data-difficulty="easy">Easy</button>
        <button class="filter-btn" type="button" data-difficulty="medium">Medium</button>
        <button class="filter-btn" type="button" data-difficulty="hard">Hard</button>
      </div>
      <div class="problems" id="problems-list"></div>
    </section>

    <section>
      <h2>Progress</h2>
      <svg id="chart" viewBox="0 0 640 280" aria-label="Problems solved over time" role="img"></svg>
    </section>
  </main>

  <script>
    const form = document.getElementById('problem-form');
    const listEl = document.getElementById('problems-list');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const filterButtons = Array.from(document.querySelectorAll('.filter-btn'));
    const statEls = {
      total: document.getElementById('total-problems'),
      easy: document.getElementById('easy-problems'),
      medium: document.getElementById('medium-problems'),
      hard: document.getElementById('hard-problems')
    };

    let activeFilter = 'all';

    const escapeHtml = (value) =>
      String(value ?? '')
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatDate = (value) => {
      const parts = /^(\d{4})-(\d{2})-(\d{2})$/.exec(value || '');
      if (!parts) {
        return value;
      }
      const date = new Date(Number(parts[1]), Number(parts[2]) - 1, Number(parts[3]));
      return date.toLocaleDateString(undefined, { year: 'numeric', month: 'long', day: 'numeric' });
    };

    const capitalize = (value) => value.charAt(0).toUpperCase() + value.slice(1);

    const renderCard = (problem) => {
      const tags = problem.tags.length
        ? `<div class="tags">${problem.tags.map((tag) => `<span class="tag">${escapeHtml(tag)}</span>`).join('')}</div>`
        : '';
      const view = problem.link
        ? `<a class="view-btn" href="${escapeHtml(problem.link)}" target="_blank" rel="noopener">View problem</a>`
        : '';
      return `
        <article class="problem-card ${problem.difficulty}">
          <div class="problem-header">
            <h3 class="problem-title">${escapeHtml(problem.title)}</h3>
            <span class="badge ${problem.difficulty}">${capitalize(problem.difficulty)}</span>
          </div>
          <div class="problem-meta">
            <span>${escapeHtml(formatDate(problem.date))}</span>
            <span>Time: ${escapeHtml(problem.timeComplexity)}</span>
            <span>Space: ${escapeHtml(problem.spaceComplexity)}</span>
          </div>
          ${tags}
          <p class="problem-solution"><strong>Solution approach:</strong> ${escapeHtml(problem.solution)}</p>
          <div class="problem-actions">
            ${view}
            <form class="delete-form" method="post" action="/problems/${encodeURIComponent(problem.id)}/delete" data-id="${escapeHtml(problem.id)}">
              <button class="delete-btn" type="submit">Delete</button>
            </form>
          </div>
        </article>
      `;
    };

    const renderProblems = (problems) => {
      if (!problems.length) {
        listEl.innerHTML = '<p class="no-problems">No problems found. Add your first problem!</p>';
        return;
      }
      listEl.innerHTML = problems.map(renderCard).join('');
    };

    const renderStats = (stats) => {
      statEls.total.textContent = stats.total;
      statEls.easy.textContent = stats.easy;
      statEls.medium.textContent = stats.medium;
      statEls.hard.textContent = stats.hard;
    };

    const renderChart = (points) => {
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 640;
      const height = 280;
      const paddingX = 48;
      const paddingY = 36;
      const top = 20;

      const max = Math.max(1, ...points.map((point) => point.total));
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / max;
      const x = (index) => (points.length > 1 ? paddingX + index * xStep : width / 2);
      const y = (value) => height - paddingY - value * scaleY;

      const line = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.total).toFixed(2)}`)
        .join(' ');
      const area = `${line} L ${x(points.length - 1).toFixed(2)} ${y(0)} L ${x(0).toFixed(2)} ${y(0)} Z`;

      const ticks = Math.min(max, 4);
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = Math.round((max * i) / ticks);
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${value}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(points.length / 8));
      const xLabels = points
        .map((point, index) =>
          index % labelEvery === 0
            ? `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(point.label)}</text>`
            : ''
        )
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.total)}" r="4"><title>${escapeHtml(point.label)}: ${point.total}</title></circle>`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-fill" d="${area}" />
        <path class="chart-line" d="${line}" />
        ${circles}
        ${xLabels}
      `;
    };

    const fetchJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(`Unable to load ${url}`);
      }
      return res.json();
    };

    const loadProblems = async () => {
      renderProblems(await fetchJson(`/api/problems?difficulty=${activeFilter}`));
    };

    const refresh = async () => {
      const [, stats, chart] = await Promise.all([
        loadProblems(),
        fetchJson('/api/stats'),
        fetchJson('/api/chart')
      ]);
      renderStats(stats);
      renderChart(chart.points);
    };

    const addProblem = async () => {
      const fields = new FormData(form);
      const payload = {
        title: fields.get('title'),
        link: fields.get('link'),
        date: fields.get('date'),
        difficulty: fields.get('difficulty'),
        solution: fields.get('solution'),
        timeComplexity: fields.get('timeComplexity'),
        spaceComplexity: fields.get('spaceComplexity'),
        tags: String(fields.get('tags') || '').split(',')
      };

      setStatus('Saving...', 'info');
      const res = await fetch('/api/problems', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      const date = fields.get('date');
      form.reset();
      document.getElementById('problem-date').value = date;
      setStatus('Problem added successfully!', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
      await refresh();
    };

    const deleteProblem = async (id) => {
      if (!confirm('Are you sure you want to delete this problem?')) {
        return;
      }
      const res = await fetch(`/api/problems/${encodeURIComponent(id)}`, { method: 'DELETE' });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Delete failed');
      }
      await refresh();
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      addProblem().catch((err) => setStatus(err.message, 'error'));
    });

    filterButtons.forEach((button) => {
      button.addEventListener('click', () => {
        activeFilter = button.dataset.difficulty;
        filterButtons.forEach((btn) => btn.classList.toggle('active', btn === button));
        loadProblems().catch((err) => setStatus(err.message, 'error'));
      });
    });

    listEl.addEventListener('submit', (event) => {
      const deleteForm = event.target.closest('.delete-form');
      if (deleteForm) {
        event.preventDefault();
        deleteProblem(deleteForm.dataset.id).catch((err) => setStatus(err.message, 'error'));
      }
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
